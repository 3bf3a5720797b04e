//! 员工资源

pub mod handler;
pub mod model;
pub mod service;
