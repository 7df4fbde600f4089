use serde::{Deserialize, Serialize};

/// Read-only catalog entry shown by the tips carousel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnergyTip {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub potential_savings: String,
}

impl EnergyTip {
    fn new(id: u32, title: &str, description: &str, potential_savings: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            description: description.to_string(),
            potential_savings: potential_savings.to_string(),
        }
    }
}

/// Built-in tip catalog used when the configuration supplies none.
pub fn default_tips() -> Vec<EnergyTip> {
    vec![
        EnergyTip::new(
            1,
            "Adjust your refrigerator temperature",
            "Setting your refrigerator to 3-5°C instead of 2°C can reduce its energy consumption by up to 25%.",
            "₱150-300 per month",
        ),
        EnergyTip::new(
            2,
            "Use natural ventilation",
            "Opening windows during cooler hours instead of using air conditioning can significantly reduce your energy bill.",
            "₱500-1000 per month",
        ),
        EnergyTip::new(
            3,
            "Switch to LED lighting",
            "Replacing all incandescent bulbs with LED alternatives uses up to 75% less energy and lasts 25 times longer.",
            "₱200-400 per month",
        ),
        EnergyTip::new(
            4,
            "Unplug idle electronics",
            "Devices on standby can account for up to 10% of your home's energy use. Unplug them when not in use.",
            "₱100-250 per month",
        ),
        EnergyTip::new(
            5,
            "Run full loads of laundry",
            "Washing machines use the same amount of energy regardless of load size. Wait until you have a full load.",
            "₱150-300 per month",
        ),
    ]
}
