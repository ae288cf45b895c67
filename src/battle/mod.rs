pub mod calculators;
pub mod catch;
pub mod engine;
pub mod escape;
pub mod state;

#[cfg(test)]
mod tests;
