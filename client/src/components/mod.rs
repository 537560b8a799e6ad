pub mod space_card;
pub mod space_form;
pub mod space_list;
