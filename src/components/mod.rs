//! UI Components
//!
//! Reusable Leptos components.

mod convert_lead_modal;
mod dashboard;
mod delete_confirm_button;
mod feedback;
mod header;
mod lead_detail;
mod lead_edit_form;
mod leads_filter;
mod leads_list;
mod leads_table;
mod opportunities_table;
mod pagination;
mod sortable_header;

pub use convert_lead_modal::ConvertLeadModal;
pub use dashboard::Dashboard;
pub use delete_confirm_button::DeleteConfirmButton;
pub use feedback::{ErrorMessage, LoadingSpinner, StorageBanner, Toast};
pub use header::{Header, Tab};
pub use lead_detail::LeadDetail;
pub use lead_edit_form::LeadEditForm;
pub use leads_filter::LeadsFilter;
pub use leads_list::LeadsList;
pub use leads_table::LeadsTable;
pub use opportunities_table::OpportunitiesTable;
pub use pagination::Pagination;
pub use sortable_header::SortableHeader;
