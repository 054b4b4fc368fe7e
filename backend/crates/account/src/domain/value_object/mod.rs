//! Value Object Module

pub mod birth_date;
pub mod cpf;
pub mod email;
pub mod full_name;
pub mod job_role;
pub mod password;
