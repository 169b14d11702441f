pub mod reservation_form;
