use serde::{Deserialize, Serialize};

/// Quantity picker on the product page. Never below one.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "QuantityState")]
pub struct QuantityStepper {
    value: u32,
}

#[derive(Deserialize)]
struct QuantityState {
    value: u32,
}

impl From<QuantityState> for QuantityStepper {
    fn from(state: QuantityState) -> Self {
        let mut qty = Self::default();
        qty.set(state.value);
        qty
    }
}

impl Default for QuantityStepper {
    fn default() -> Self {
        Self { value: 1 }
    }
}

impl QuantityStepper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn increment(&mut self) -> u32 {
        self.value = self.value.saturating_add(1);
        self.value
    }

    pub fn decrement(&mut self) -> u32 {
        self.value = self.value.saturating_sub(1).max(1);
        self.value
    }

    pub fn set(&mut self, value: u32) -> u32 {
        self.value = value.max(1);
        self.value
    }
}
