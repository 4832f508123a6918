pub mod backtest;
pub mod config;
pub mod engine;
pub mod expand;
pub mod frequency;
pub mod interval;
pub mod matrix;
pub mod sampler;
