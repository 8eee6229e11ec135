pub mod use_animais;
pub mod use_animal_form;
pub mod use_cuidado_form;
pub mod use_cuidados;
