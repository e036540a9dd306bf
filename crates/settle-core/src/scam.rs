//! Scam-message scoring - heuristic red-flag analysis
//!
//! A fixed table of case-insensitive phrase heuristics. Scoring is
//! deterministic: the same input always yields the same score, level,
//! category, and flag set. This is advisory triage for newcomers, not fraud
//! detection; the thresholds are intentionally conservative.

use crate::entities::RedFlag;
use crate::value_objects::{FlagSeverity, InputKind, RiskLevel, ScamCategory};

/// Risk score at or above which an assessment is Medium
pub const MEDIUM_THRESHOLD: u8 = 30;
/// Risk score at or above which an assessment is High
pub const HIGH_THRESHOLD: u8 = 60;

/// One heuristic in the rule table
struct Rule {
    code: &'static str,
    title: &'static str,
    description: &'static str,
    severity: FlagSeverity,
    category: ScamCategory,
    weight: u8,
    /// Case-insensitive needles; the rule fires when any one is present
    needles: &'static [&'static str],
    /// When set, the rule only applies to these input kinds
    kinds: Option<&'static [InputKind]>,
}

/// The rule table. Order matters only for tie-breaking the dominant category.
const RULES: &[Rule] = &[
    Rule {
        code: "UPFRONT_PAYMENT",
        title: "Payment demanded before viewing or contract",
        description: "Legitimate landlords and agencies do not ask for deposits or holding fees before you have viewed the property or signed anything.",
        severity: FlagSeverity::Danger,
        category: ScamCategory::Rental,
        weight: 35,
        needles: &[
            "deposit before viewing",
            "pay before viewing",
            "holding fee to secure",
            "transfer the deposit",
            "send the deposit",
            "secure the property today",
        ],
        kinds: None,
    },
    Rule {
        code: "NO_VIEWING",
        title: "Viewing refused or impossible",
        description: "Claims that the landlord is abroad or that viewings are not possible are a classic rental-fraud setup.",
        severity: FlagSeverity::Danger,
        category: ScamCategory::Rental,
        weight: 30,
        needles: &[
            "currently abroad",
            "out of the country",
            "cannot arrange a viewing",
            "no viewing",
            "keys will be posted",
            "keys by courier",
        ],
        kinds: None,
    },
    Rule {
        code: "TOO_CHEAP",
        title: "Price far below market rate",
        description: "Rents or salaries well below the going rate are bait. Compare with similar listings before engaging.",
        severity: FlagSeverity::Warning,
        category: ScamCategory::Rental,
        weight: 15,
        needles: &[
            "all bills included for only",
            "below market",
            "unbeatable price",
            "once in a lifetime offer",
        ],
        kinds: None,
    },
    Rule {
        code: "GIFT_CARD_PAYMENT",
        title: "Payment via gift cards or vouchers",
        description: "No legitimate business or authority accepts payment in gift cards, vouchers, or top-up codes.",
        severity: FlagSeverity::Danger,
        category: ScamCategory::Phishing,
        weight: 40,
        needles: &[
            "gift card",
            "giftcard",
            "steam card",
            "itunes card",
            "voucher code",
            "top-up code",
        ],
        kinds: None,
    },
    Rule {
        code: "CRYPTO_PAYMENT",
        title: "Payment in cryptocurrency requested",
        description: "Requests to pay rent, fees, or fines in cryptocurrency are almost always fraudulent.",
        severity: FlagSeverity::Danger,
        category: ScamCategory::Phishing,
        weight: 35,
        needles: &["bitcoin", "crypto wallet", "usdt", "binance transfer"],
        kinds: None,
    },
    Rule {
        code: "URGENCY",
        title: "Artificial urgency",
        description: "Pressure to act immediately is designed to stop you checking. Slow down and verify independently.",
        severity: FlagSeverity::Warning,
        category: ScamCategory::Other,
        weight: 15,
        needles: &[
            "act now",
            "urgent action required",
            "within 24 hours",
            "immediately or",
            "last chance",
            "offer expires today",
        ],
        kinds: None,
    },
    Rule {
        code: "OFF_PLATFORM",
        title: "Moves the conversation off-platform",
        description: "Being pushed from a listing site or email onto WhatsApp or Telegram removes the protections and records of the original platform.",
        severity: FlagSeverity::Warning,
        category: ScamCategory::FakeAgency,
        weight: 15,
        needles: &[
            "contact me on whatsapp",
            "message me on telegram",
            "continue on whatsapp",
            "dm me on telegram",
        ],
        kinds: None,
    },
    Rule {
        code: "VISA_FEE_DEMAND",
        title: "Visa or Home Office fee demanded",
        description: "The Home Office never asks for payment by phone, email, or transfer to a personal account. Check any fee on gov.uk directly.",
        severity: FlagSeverity::Danger,
        category: ScamCategory::VisaFraud,
        weight: 40,
        needles: &[
            "visa fee",
            "home office fine",
            "immigration fee",
            "deportation unless",
            "your visa will be cancelled",
            "brp card fee",
        ],
        kinds: None,
    },
    Rule {
        code: "JOB_FEE",
        title: "Job offer that requires payment",
        description: "Real employers never charge for training, equipment, or DBS checks up front as a condition of an offer.",
        severity: FlagSeverity::Danger,
        category: ScamCategory::Job,
        weight: 35,
        needles: &[
            "training fee",
            "registration fee to start",
            "pay for your dbs",
            "equipment deposit",
            "admin fee before your first shift",
        ],
        kinds: None,
    },
    Rule {
        code: "NO_INTERVIEW_JOB",
        title: "Job offered without an interview",
        description: "Unsolicited offers with no interview and unusually high pay are recruitment bait.",
        severity: FlagSeverity::Warning,
        category: ScamCategory::Job,
        weight: 20,
        needles: &[
            "no interview required",
            "no experience needed, start today",
            "earn up to \u{00a3}500 a day",
            "guaranteed income",
        ],
        kinds: None,
    },
    Rule {
        code: "MONEY_FORWARDING",
        title: "Asked to receive and forward money",
        description: "Receiving money into your account and sending it on is money laundering (acting as a money mule), even if you keep a commission. It is a crime.",
        severity: FlagSeverity::Danger,
        category: ScamCategory::MoneyMule,
        weight: 45,
        needles: &[
            "receive money on our behalf",
            "transfer it to another account",
            "use your bank account",
            "keep a commission",
            "process payments through your account",
        ],
        kinds: None,
    },
    Rule {
        code: "CREDENTIAL_BAIT",
        title: "Asks you to confirm credentials or details",
        description: "Banks, HMRC, and the NHS never ask you to confirm passwords, PINs, or full card details by message.",
        severity: FlagSeverity::Danger,
        category: ScamCategory::Phishing,
        weight: 30,
        needles: &[
            "verify your account",
            "confirm your password",
            "confirm your details",
            "your account has been suspended",
            "unusual activity on your account",
            "click here to restore access",
        ],
        kinds: None,
    },
    Rule {
        code: "SHORTENED_URL",
        title: "Shortened or obscured link",
        description: "Link shorteners hide the real destination. Expand the link or navigate to the organisation's site directly.",
        severity: FlagSeverity::Warning,
        category: ScamCategory::Phishing,
        weight: 15,
        needles: &["bit.ly/", "tinyurl.com/", "t.co/", "goo.gl/", "is.gd/"],
        kinds: Some(&[InputKind::Url, InputKind::Email, InputKind::Text]),
    },
    Rule {
        code: "LOOKALIKE_DOMAIN",
        title: "Lookalike official domain",
        description: "Official UK government services live on gov.uk. Domains that merely contain 'gov' or a bank's name are imitations.",
        severity: FlagSeverity::Danger,
        category: ScamCategory::Phishing,
        weight: 30,
        needles: &[
            "gov-uk",
            "govuk-",
            "hmrc-refund",
            "ukvisa-",
            "homeoffice-",
            ".gov.uk.",
        ],
        kinds: Some(&[InputKind::Url, InputKind::Email]),
    },
];

/// Outcome of analyzing one piece of content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub risk_score: u8,
    pub risk_level: RiskLevel,
    pub category: ScamCategory,
    pub red_flags: Vec<RedFlag>,
    pub safe_next_steps: Vec<String>,
}

/// Run the rule table against submitted content
#[must_use]
pub fn analyze(kind: InputKind, content: &str) -> Analysis {
    let haystack = content.to_lowercase();

    let mut score: u32 = 0;
    let mut red_flags = Vec::new();
    let mut matched_rules: Vec<&Rule> = Vec::new();

    for rule in RULES {
        if let Some(kinds) = rule.kinds {
            if !kinds.contains(&kind) {
                continue;
            }
        }
        if rule.needles.iter().any(|needle| haystack.contains(needle)) {
            score += u32::from(rule.weight);
            matched_rules.push(rule);
            red_flags.push(RedFlag {
                code: rule.code.to_string(),
                title: rule.title.to_string(),
                description: rule.description.to_string(),
                severity: rule.severity,
                category: rule.category,
            });
        }
    }

    let risk_score = score.min(100) as u8;
    let risk_level = level_for(risk_score);
    let category = dominant_category(&matched_rules);
    let safe_next_steps = next_steps(category, risk_level);

    Analysis {
        risk_score,
        risk_level,
        category,
        red_flags,
        safe_next_steps,
    }
}

/// Map a score to its risk band
#[must_use]
pub fn level_for(score: u8) -> RiskLevel {
    if score >= HIGH_THRESHOLD {
        RiskLevel::High
    } else if score >= MEDIUM_THRESHOLD {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

/// The category with the highest total matched weight, table order breaking
/// ties. `Other`-category rules never outvote a specific category.
fn dominant_category(matched: &[&Rule]) -> ScamCategory {
    let mut best: Option<(ScamCategory, u32)> = None;

    for rule in matched {
        if rule.category == ScamCategory::Other {
            continue;
        }
        let total: u32 = matched
            .iter()
            .filter(|r| r.category == rule.category)
            .map(|r| u32::from(r.weight))
            .sum();
        match best {
            Some((_, best_total)) if total <= best_total => {}
            _ => best = Some((rule.category, total)),
        }
    }

    best.map_or(ScamCategory::Other, |(category, _)| category)
}

/// Advice lines for the matched category and overall level
fn next_steps(category: ScamCategory, level: RiskLevel) -> Vec<String> {
    let mut steps: Vec<String> = Vec::new();

    match category {
        ScamCategory::Rental => {
            steps.push("Never pay a deposit before viewing the property in person.".to_string());
            steps.push(
                "Check the landlord or agency is registered (e.g. with a redress scheme)."
                    .to_string(),
            );
        }
        ScamCategory::Job => {
            steps.push("Never pay to start a job; real employers cover their own costs.".to_string());
            steps.push("Look the company up on Companies House and call them directly.".to_string());
        }
        ScamCategory::MoneyMule => {
            steps.push(
                "Do not receive or forward money for anyone; it is money laundering even if you were deceived."
                    .to_string(),
            );
        }
        ScamCategory::VisaFraud => {
            steps.push(
                "Check any immigration fee or letter against gov.uk; the Home Office does not demand payment by phone or transfer."
                    .to_string(),
            );
        }
        ScamCategory::FakeAgency | ScamCategory::Phishing => {
            steps.push(
                "Do not click links in the message; go to the organisation's website directly."
                    .to_string(),
            );
            steps.push("Never share passwords, PINs, or full card details.".to_string());
        }
        ScamCategory::Other => {}
    }

    if level >= RiskLevel::Medium {
        steps.push("Report it to Action Fraud (actionfraud.police.uk) or forward texts to 7726.".to_string());
    }
    if steps.is_empty() {
        steps.push(
            "Nothing obviously suspicious was found, but stay cautious with money and personal details."
                .to_string(),
        );
    }

    steps
}
