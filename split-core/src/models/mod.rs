mod bill_state;
mod party_size;
mod tip_percentage;

pub use bill_state::BillState;
pub use party_size::PartySize;
pub use tip_percentage::TipPercentage;
