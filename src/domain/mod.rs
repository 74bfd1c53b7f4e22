// Domain layer: EDAM entities, ENML content, notebook selection and the store ports.

pub mod enml;
pub mod model;
pub mod ports;
pub mod selection;
