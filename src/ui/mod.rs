// Terminal UI module

pub mod dashboard;
