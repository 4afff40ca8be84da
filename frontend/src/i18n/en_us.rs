pub mod common {
    pub const SEARCH_PLACEHOLDER: &str = "Search...";
    pub const LOADING: &str = "Loading...";
    pub const ACTION_FAILED: &str = "Action failed. Please try again.";
    pub const CANCEL: &str = "Cancel";
    pub const EDIT: &str = "Edit";
    pub const DELETE: &str = "Delete";
    pub const RESET: &str = "Reset";
    pub const RETRY: &str = "Retry";
    pub const ALL_STATUSES: &str = "All statuses";
    pub const STATUS_FILTER_ARIA: &str = "Filter by status";
    pub const ACTION_TAKEN: &str = "Action taken";
    pub const IMAGE: &str = "Image";
    pub const VIEW: &str = "View";
    pub const HIDE: &str = "Hide";
    pub const NO_VALUE: &str = "—";
}

pub mod loading_spinner {
    pub const ARIA_LABEL: &str = "Loading";
}

pub mod pagination {
    pub const ARIA_NAV: &str = "Pagination";
    pub const PREV: &str = "‹ Prev";
    pub const NEXT: &str = "Next ›";
    pub const PAGE_OF_TEMPLATE: &str = "Page {} of {}";
}

pub mod error_banner {
    pub const TITLE: &str = "Something went wrong";
    pub const CLOSE_ARIA: &str = "Dismiss error";
}

pub mod toast {
    pub const CLOSE_ARIA: &str = "Dismiss notification";
}

pub mod sidebar {
    pub const BRAND: &str = "Zetho Admin";
    pub const NAV_ARIA: &str = "Admin navigation";
    pub const DASHBOARD: &str = "Dashboard";
    pub const REPORTED_POSTS: &str = "Reported Posts";
    pub const REPORTED_NEWS: &str = "Reported News";
    pub const REPORTED_JOBS: &str = "Reported Jobs";
    pub const REPORTED_GROUPS: &str = "Reported Groups";
    pub const REPORTED_USERS: &str = "Reported Users";
    pub const HELP_SUPPORT: &str = "Help & Support";
    pub const MAIN_GROUPS: &str = "Main Groups";
    pub const NEWS: &str = "News";
    pub const NOTIFICATIONS: &str = "Notifications";
}

pub mod topbar {
    pub const TITLE: &str = "Admin Panel";
    pub const SUBTITLE: &str = "Manage your platform";
    pub const AVATAR: &str = "AD";
    pub const USER_NAME: &str = "Admin User";
    pub const USER_ROLE: &str = "Super Admin";
    pub const LOGOUT: &str = "Logout";
}

pub mod login {
    pub const TITLE: &str = "Admin Login";
    pub const SUBTITLE: &str = "Welcome back! Please login to your account";
    pub const USERNAME: &str = "Username";
    pub const USERNAME_PLACEHOLDER: &str = "Enter your username";
    pub const PASSWORD: &str = "Password";
    pub const PASSWORD_PLACEHOLDER: &str = "Enter your password";
    pub const SHOW_PASSWORD: &str = "Show password";
    pub const HIDE_PASSWORD: &str = "Hide password";
    pub const SUBMIT: &str = "Login";
    pub const SUBMITTING: &str = "Logging in...";
    pub const FOOTER: &str = "Secure admin access only";
}

pub mod dashboard {
    pub const TITLE: &str = "Admin Dashboard";
    pub const LOAD_FAILED: &str = "Failed to load dashboard data";
    pub const CARD_SUBTITLE: &str = "Overview";
    pub const TOTAL_USERS: &str = "Total Users";
    pub const TOTAL_GROUPS: &str = "Total Groups";
    pub const TOTAL_JOBS: &str = "Total Jobs";
    pub const TOTAL_POSTS: &str = "Total Posts";
    pub const TOTAL_NEWS: &str = "Total News";
    pub const TOTAL_TICKETS: &str = "Help & Support Tickets";
    pub const REPORTED_GROUPS: &str = "Reported Groups";
    pub const REPORTED_NEWS: &str = "Reported News";
    pub const REPORTED_POSTS: &str = "Reported Posts";
}

pub mod report_table {
    pub const USER: &str = "User";
    pub const REPORTER: &str = "Reporter";
    pub const REASON: &str = "Reason";
    pub const STATUS: &str = "Status";
    pub const REPORTED_ON: &str = "Reported On";
    pub const REPORTED_AT: &str = "Reported At";
    pub const ACTIONS: &str = "Actions";
    pub const ACTION: &str = "Action";
}

pub mod reported_posts {
    pub const TITLE: &str = "Reported Posts";
    pub const LOAD_FAILED: &str = "Failed to load reported posts";
    pub const LOADING: &str = "Loading reported posts...";
    pub const EMPTY: &str = "No reported posts found 🎉";
    pub const SEARCH_ARIA: &str = "Search reported posts";
    pub const POST_TEMPLATE: &str = "Post #{}";
    pub const REPORTS_TEMPLATE: &str = "{} reports";
    pub const REPORTER_TEMPLATE: &str = "Reporter: {}";
    pub const MORE_TEMPLATE: &str = "+{} more";
}

pub mod reported_news {
    pub const TITLE: &str = "Reported News";
    pub const SUBTITLE: &str = "Review flagged news items and moderate quickly.";
    pub const LOAD_FAILED: &str = "Failed to load reported news";
    pub const LOADING: &str = "Loading reported news...";
    pub const EMPTY: &str = "No reported news found 🎉";
    pub const SEARCH_ARIA: &str = "Search reported news";
    pub const NO_CONTENT: &str = "No content";
    pub const UNTITLED: &str = "Untitled";
    pub const GENERAL: &str = "General";
    pub const IMAGE_ALT: &str = "news image";
    pub const LATEST_BY_TEMPLATE: &str = "Latest by {}";
    pub const NO_REPORTERS: &str = "No reporters";
    pub const REPORTS_TEMPLATE: &str = "{} reports";
}

pub mod reported_groups {
    pub const TITLE: &str = "Reported Groups";
    pub const SUBTITLE: &str = "Review flagged groups and moderate quickly.";
    pub const LOAD_FAILED: &str = "Failed to load reported groups";
    pub const LOADING: &str = "Loading reported groups...";
    pub const EMPTY: &str = "No reported groups found 🎉";
    pub const SEARCH_ARIA: &str = "Search reported groups";
    pub const NO_REASON: &str = "No reason provided";
    pub const REPORTS_TEMPLATE: &str = "{} reports";
}

pub mod reported_jobs {
    pub const TITLE: &str = "Reported Jobs";
    pub const LOAD_FAILED: &str = "Failed to load reported jobs";
    pub const LOADING: &str = "Loading reported jobs...";
    pub const EMPTY: &str = "No reported jobs found";
    pub const JOB_ID: &str = "Job ID";
    pub const JOB_TITLE: &str = "Title";
    pub const REPORTED_BY: &str = "Reported By";
    pub const REASON: &str = "Reason";
    pub const DATE: &str = "Date";
}

pub mod reported_users {
    pub const TITLE: &str = "Reported Users";
    pub const LOAD_FAILED: &str = "Failed to load reported users";
    pub const LOADING: &str = "Loading reported users...";
    pub const EMPTY: &str = "No reported users found";
    pub const USER_ID: &str = "User ID";
    pub const USERNAME: &str = "Username";
    pub const REPORTED_BY: &str = "Reported By";
    pub const REASON: &str = "Reason";
    pub const DATE: &str = "Date";
}

pub mod help_support {
    pub const TITLE: &str = "Help & Support Tickets";
    pub const LOAD_FAILED: &str = "Failed to load support tickets";
    pub const LOADING: &str = "Loading tickets...";
    pub const EMPTY: &str = "No tickets found 🎉";
    pub const SEARCH_ARIA: &str = "Search tickets";
    pub const STAT_TOTAL: &str = "Total Tickets";
    pub const STAT_PENDING: &str = "Pending";
    pub const STAT_IN_PROGRESS: &str = "In Progress";
    pub const STAT_RESOLVED: &str = "Resolved";
    pub const TICKET_TEMPLATE: &str = "Ticket #{}";
    pub const GENERAL_QUERY: &str = "General Query";
    pub const USER_TEMPLATE: &str = "User: {}";
    pub const QUERY_TEMPLATE: &str = "Query: {}";
    pub const EXPAND: &str = "Expand";
    pub const COLLAPSE: &str = "Collapse";
    pub const RESPOND: &str = "Respond";
    pub const FIELD_TICKET_ID: &str = "Ticket ID";
    pub const FIELD_USER_ID: &str = "User ID";
    pub const FIELD_QUERY_TYPE: &str = "Query Type";
    pub const FIELD_STATUS: &str = "Status";
    pub const FIELD_PRIORITY: &str = "Priority";
    pub const FIELD_CREATED_AT: &str = "Created At";
    pub const FIELD_MESSAGE: &str = "Message";
    pub const FIELD_REPLY: &str = "Reply";
    pub const MODAL_TITLE_TEMPLATE: &str = "Respond to Ticket #{}";
    pub const REPLY_PLACEHOLDER: &str = "Type your response here...";
    pub const SEND_REPLY: &str = "Send Reply";
    pub const SEND_AND_RESOLVE: &str = "Send & Resolve";
    pub const SEND_AND_PROGRESS: &str = "Send & Mark In Progress";
}

pub mod main_groups {
    pub const TITLE: &str = "Main Groups";
    pub const SUBTITLE: &str = "Manage the top-level groups used across the app";
    pub const STAT_TOTAL: &str = "Total Groups";
    pub const NAME: &str = "Group Name";
    pub const NAME_PLACEHOLDER: &str = "Enter group name";
    pub const DESCRIPTION: &str = "Description";
    pub const DESCRIPTION_PLACEHOLDER: &str = "Short description";
    pub const SEARCH_PLACEHOLDER: &str = "Search groups...";
    pub const SHOWING_TEMPLATE: &str = "Showing {} of {} groups";
    pub const ADD_GROUP: &str = "Add Group";
    pub const UPDATE_GROUP: &str = "Update Group";
    pub const LOAD_FAILED: &str = "Unable to load groups";
    pub const LOADING: &str = "Loading groups...";
    pub const EMPTY: &str = "No groups found";
    pub const COLUMN_NAME: &str = "Name";
    pub const COLUMN_DESCRIPTION: &str = "Description";
    pub const COLUMN_ACTIONS: &str = "Actions";
    pub const DELETE_TITLE: &str = "Delete Group";
    pub const DELETE_MESSAGE: &str =
        "Are you sure you want to delete this group? This action cannot be undone.";
    pub const NAME_REQUIRED: &str = "Group name is required";
    pub const ADDED: &str = "Group added";
    pub const UPDATED: &str = "Group updated";
    pub const DELETED: &str = "Group deleted";
    pub const SAVE_FAILED: &str = "Save failed";
    pub const DELETE_FAILED: &str = "Delete failed";
}

pub mod news {
    pub const TITLE: &str = "News Management";
    pub const OPEN_FORM: &str = "+ Add News";
    pub const CLOSE_FORM: &str = "Close Form";
    pub const FORM_EDIT: &str = "Edit News";
    pub const FORM_ADD: &str = "Add New News";
    pub const DOCTOR_ID: &str = "Doctor ID";
    pub const DOCTOR_ID_PLACEHOLDER: &str = "Enter doctor ID";
    pub const HEADING: &str = "Heading";
    pub const HEADING_PLACEHOLDER: &str = "Enter heading";
    pub const CONTENT: &str = "Content";
    pub const CONTENT_PLACEHOLDER: &str = "Enter content";
    pub const SPECIALTY: &str = "Specialty";
    pub const SPECIALTY_PLACEHOLDER: &str = "Enter specialty";
    pub const SUBMIT_ADD: &str = "Add News";
    pub const SUBMIT_UPDATE: &str = "Update News";
    pub const LOAD_FAILED: &str = "Failed to load news";
    pub const LOADING: &str = "Loading news...";
    pub const EMPTY: &str = "No news yet";
    pub const EMPTY_HINT: &str = "Get started by adding your first news item";
    pub const FORM_HINT: &str = "Fill in the details below";
    pub const UPDATED: &str = "News updated successfully!";
    pub const ADDED: &str = "News added successfully!";
    pub const DELETED: &str = "News deleted successfully!";
    pub const FAILED: &str = "Error occurred!";
    pub const DELETE_TITLE: &str = "Delete News";
    pub const DELETE_MESSAGE: &str = "Are you sure you want to delete this news?";
    pub const DOCTOR_TEMPLATE: &str = "Doctor: {}";
}

pub mod notifications {
    pub const TITLE: &str = "Notification Management";
    pub const OPEN_FORM: &str = "+ Add Notification";
    pub const CLOSE_FORM: &str = "Close Form";
    pub const FORM_EDIT: &str = "Edit Notification";
    pub const FORM_ADD: &str = "Add Notification";
    pub const FIELD_TITLE: &str = "Title";
    pub const FIELD_TITLE_PLACEHOLDER: &str = "Enter title";
    pub const FIELD_TYPE: &str = "Type";
    pub const FIELD_MESSAGE: &str = "Message";
    pub const FIELD_MESSAGE_PLACEHOLDER: &str = "Enter message";
    pub const SUBMIT_ADD: &str = "Add Notification";
    pub const SUBMIT_UPDATE: &str = "Update Notification";
    pub const LOAD_FAILED: &str = "Failed to load notifications";
    pub const LOADING: &str = "Loading notifications...";
    pub const EMPTY: &str = "No notifications yet";
    pub const IMAGE_ALT: &str = "notification image";
    pub const ADDED: &str = "Notification added!";
    pub const UPDATED: &str = "Notification updated!";
    pub const DELETED: &str = "Notification deleted!";
    pub const FAILED: &str = "Error saving notification!";
    pub const DELETE_FAILED: &str = "Error deleting notification!";
    pub const DELETE_TITLE: &str = "Delete Notification";
    pub const DELETE_MESSAGE: &str = "Are you sure?";
}
