pub mod cu_tri;
pub mod report;
pub mod submit;
