mod people_search;
mod task_actions;
mod task_card;

pub use people_search::PeopleSearch;
pub use task_actions::TaskActions;
pub use task_card::TaskCard;
