pub mod cleavage;
pub mod fragmenter;
pub mod modifiers;
