pub mod cuidado_form;
pub mod cuidado_table;
pub mod cuidado_view_container;

pub use cuidado_form::CuidadoForm;
pub use cuidado_table::CuidadoTable;
pub use cuidado_view_container::CuidadoViewContainer;
