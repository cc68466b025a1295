// ABOUTME: Library exports for anicii CLI modules for testing and external use
// ABOUTME: Makes internal modules available to integration tests

pub mod config;
pub mod constants;
pub mod output;
pub mod renderer;
pub mod saver;
pub mod slideshow;
