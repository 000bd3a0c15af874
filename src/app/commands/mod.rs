pub mod set_properties;
