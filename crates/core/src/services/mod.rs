pub mod budget_service;
pub mod inventory_service;
pub mod net_worth_service;
pub mod percent;
pub mod ranking_service;
pub mod savings_goal_service;
