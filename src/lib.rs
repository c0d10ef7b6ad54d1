pub mod consts;
pub mod controller;
pub mod model;
pub mod persistence;
pub mod repository;
pub mod selection;
