pub mod eventos;
pub mod graficas;
pub mod modals;
pub mod registro;
