pub mod nested;
pub mod transform;
