//! Page handlers
//!
//! Server-rendered HTML for the marketing site, auth pages, and dashboard
//! shell. The route gate in `middleware::route_gate` decides who may reach
//! which page; handlers here only render.

use axum::response::Html;

/// Wrap page content in the shared document shell
fn shell(title: &str, body: &str) -> Html<String> {
    Html(format!(
        "<!doctype html>\n<html lang=\"en\">\n<head>\n  <meta charset=\"utf-8\">\n  \
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n  \
         <title>{title} · Settle</title>\n</head>\n<body>\n{body}\n</body>\n</html>\n"
    ))
}

/// Marketing home page
///
/// GET /
pub async fn home() -> Html<String> {
    shell(
        "Your UK settlement roadmap",
        r#"<main>
  <h1>Settle in the UK with confidence</h1>
  <p>A personalized task roadmap, scam checks for suspicious messages,
     ready-to-send templates, and a directory of trusted local services.</p>
  <nav>
    <a href="/register">Get started</a>
    <a href="/login">Sign in</a>
    <a href="/pricing">Pricing</a>
  </nav>
</main>"#,
    )
}

/// Pricing page
///
/// GET /pricing
pub async fn pricing() -> Html<String> {
    shell(
        "Pricing",
        r#"<main>
  <h1>Pricing</h1>
  <p>The roadmap, scam checks, and resource directory are free while we are
     in early access.</p>
</main>"#,
    )
}

/// Privacy policy page
///
/// GET /privacy
pub async fn privacy() -> Html<String> {
    shell(
        "Privacy policy",
        r#"<main>
  <h1>Privacy policy</h1>
  <p>We store only what the service needs: your account, your onboarding
     answers, and the checks you run. We never sell your data.</p>
</main>"#,
    )
}

/// Terms of service page
///
/// GET /terms
pub async fn terms() -> Html<String> {
    shell(
        "Terms of service",
        r#"<main>
  <h1>Terms of service</h1>
  <p>Settle provides guidance, not legal or immigration advice. Always check
     official sources for decisions that affect your status.</p>
</main>"#,
    )
}

/// Login page
///
/// GET /login
pub async fn login() -> Html<String> {
    shell(
        "Sign in",
        r#"<main>
  <h1>Sign in</h1>
  <form method="post" action="/api/v1/auth/login" data-json-form>
    <label>Email <input type="email" name="email" required></label>
    <label>Password <input type="password" name="password" required></label>
    <button type="submit">Sign in</button>
  </form>
  <p>New here? <a href="/register">Create an account</a></p>
</main>"#,
    )
}

/// Registration page
///
/// GET /register
pub async fn register() -> Html<String> {
    shell(
        "Create your account",
        r#"<main>
  <h1>Create your account</h1>
  <form method="post" action="/api/v1/auth/register" data-json-form>
    <label>Name <input type="text" name="name" required></label>
    <label>Email <input type="email" name="email" required></label>
    <label>Password <input type="password" name="password" minlength="8" required></label>
    <button type="submit">Create account</button>
  </form>
  <p>Already registered? <a href="/login">Sign in</a></p>
</main>"#,
    )
}

/// Dashboard shell
///
/// GET /dashboard
pub async fn dashboard() -> Html<String> {
    shell(
        "Dashboard",
        r#"<main>
  <h1>Your settlement progress</h1>
  <nav>
    <a href="/dashboard">Roadmap</a>
    <a href="/scam-shield">Scam shield</a>
    <a href="/templates">Templates</a>
    <a href="/vault">Vault</a>
    <a href="/settings">Settings</a>
  </nav>
  <section id="roadmap" data-endpoint="/api/v1/roadmap"></section>
</main>"#,
    )
}

/// Scam shield page
///
/// GET /scam-shield
pub async fn scam_shield() -> Html<String> {
    shell(
        "Scam shield",
        r#"<main>
  <h1>Check a suspicious message</h1>
  <form method="post" action="/api/v1/scam-checks" data-json-form>
    <label>What did you receive?
      <select name="input_kind">
        <option value="text">Message text</option>
        <option value="url">A link</option>
        <option value="email">An email</option>
      </select>
    </label>
    <label>Paste it here <textarea name="content" required></textarea></label>
    <button type="submit">Check it</button>
  </form>
</main>"#,
    )
}

/// Templates page
///
/// GET /templates
pub async fn templates() -> Html<String> {
    shell(
        "Templates",
        r#"<main>
  <h1>Ready-to-send templates</h1>
  <section id="templates" data-endpoint="/api/v1/templates"></section>
</main>"#,
    )
}

/// Document vault page (upload support is not available yet)
///
/// GET /vault
pub async fn vault() -> Html<String> {
    shell(
        "Vault",
        r#"<main>
  <h1>Document vault</h1>
  <p>Secure document storage is coming soon.</p>
</main>"#,
    )
}

/// Settings page
///
/// GET /settings
pub async fn settings() -> Html<String> {
    shell(
        "Settings",
        r#"<main>
  <h1>Settings</h1>
  <section id="account" data-endpoint="/api/v1/users/@me"></section>
</main>"#,
    )
}

/// Admin console
///
/// GET /admin
pub async fn admin() -> Html<String> {
    shell(
        "Admin",
        r#"<main>
  <h1>Admin console</h1>
  <section id="catalog" data-endpoint="/api/v1/admin/templates"></section>
</main>"#,
    )
}
