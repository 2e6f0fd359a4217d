use crate::eco::domain::TransportProfile;
use serde::{Deserialize, Serialize};

/// Ordered table of the transport modes a deployment compares against.
/// Insertion order is significant: it is the tie-break order for
/// recommendations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransportCatalog {
    profiles: Vec<TransportProfile>,
}

impl TransportCatalog {
    pub fn new(profiles: Vec<TransportProfile>) -> Self {
        Self { profiles }
    }

    /// The product's stock mode table. The car figure doubles as the default
    /// comparison baseline.
    pub fn standard() -> Self {
        Self::new(vec![
            TransportProfile::new("bicycle", "Bicycle", 0.0, 15.0, 0.0),
            TransportProfile::new("walking", "Walking", 0.0, 5.0, 0.0),
            TransportProfile::new("electric_car", "Electric Car", 0.05, 40.0, 0.15),
            TransportProfile::new("public_transport", "Public Transport", 0.08, 25.0, 0.50),
            TransportProfile::new("car", "Car", 1.2, 40.0, 0.25),
        ])
    }

    pub fn get(&self, id: &str) -> Option<&TransportProfile> {
        self.profiles.iter().find(|profile| profile.id == id)
    }

    pub fn push(&mut self, profile: TransportProfile) {
        self.profiles.push(profile);
    }

    pub fn profiles(&self) -> &[TransportProfile] {
        &self.profiles
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.profiles.iter().map(|profile| profile.id.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }
}
