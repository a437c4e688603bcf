use crate::SlotGenerator;

pub struct SlotsController;

impl SlotsController {
    pub fn new() -> Self {
        Self
    }

    pub fn slots(&self) -> String {
        let slots = SlotGenerator::generate();
        format!("Daily slots ({}):\n{}", slots.len(), slots.join(" "))
    }
}

impl Default for SlotsController {
    fn default() -> Self {
        Self::new()
    }
}
