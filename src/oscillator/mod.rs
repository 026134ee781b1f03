//! Phase accumulator LFOs, standalone and coupled.

pub mod coupled_lfo;
pub mod lfo;
pub mod sine;
