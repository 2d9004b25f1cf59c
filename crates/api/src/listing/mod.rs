pub mod get_active_classes;
pub mod get_schedule_expectations;
pub mod get_socials_agenda;
