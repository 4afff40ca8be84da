pub mod dashboard;
pub mod help_support;
pub mod login;
pub mod main_groups;
mod nested_reports;
pub mod news;
pub mod notifications;
pub mod reported_groups;
pub mod reported_jobs;
pub mod reported_news;
pub mod reported_posts;
pub mod reported_users;
