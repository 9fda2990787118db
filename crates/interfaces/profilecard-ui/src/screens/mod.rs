pub mod user_details;
pub mod users_list;
