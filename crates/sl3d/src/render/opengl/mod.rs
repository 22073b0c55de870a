//! OpenGL backend

mod backend;

pub use backend::OpenGlBackend;
