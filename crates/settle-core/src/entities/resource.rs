//! Resource entity - an entry in the local-services directory

use chrono::{DateTime, Utc};

use crate::value_objects::{RecordId, Region, ResourceCategory, SourceType};

/// Directory entry: a service, charity, or official body a newcomer may need
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    pub category: ResourceCategory,
    pub source_type: SourceType,

    // Location
    pub region: Option<Region>,
    pub city: Option<String>,
    pub postcode_area: Option<String>,
    pub is_nationwide: bool,

    // Contact
    pub website: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,

    pub tags: Vec<String>,
    pub is_verified: bool,
    pub verified_at: Option<DateTime<Utc>>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Resource {
    /// Check whether this entry serves a given region.
    ///
    /// Nationwide entries serve every region; regional entries only their own.
    #[must_use]
    pub fn serves_region(&self, region: Region) -> bool {
        self.is_nationwide || self.region == Some(region)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resource(region: Option<Region>, nationwide: bool) -> Resource {
        let now = Utc::now();
        Resource {
            id: RecordId::new(1),
            title: "Citizens Advice".to_string(),
            description: String::new(),
            category: ResourceCategory::Legal,
            source_type: SourceType::Official,
            region,
            city: None,
            postcode_area: None,
            is_nationwide: nationwide,
            website: None,
            phone: None,
            email: None,
            address: None,
            tags: Vec::new(),
            is_verified: true,
            verified_at: Some(now),
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_nationwide_serves_all_regions() {
        let r = resource(None, true);
        assert!(r.serves_region(Region::England));
        assert!(r.serves_region(Region::NorthernIreland));
    }

    #[test]
    fn test_regional_entry_serves_only_its_region() {
        let r = resource(Some(Region::Scotland), false);
        assert!(r.serves_region(Region::Scotland));
        assert!(!r.serves_region(Region::Wales));
    }
}
