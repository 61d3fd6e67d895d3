pub mod accent;
pub mod concept;
pub mod hash;
