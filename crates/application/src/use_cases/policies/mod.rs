mod delete_policies;
mod evaluate_policies;
mod get_policies;
mod refresh_policies;
mod save_policy;
mod toggle_policy;

pub use delete_policies::DeletePoliciesUseCase;
pub use evaluate_policies::EvaluatePoliciesUseCase;
pub use get_policies::GetPoliciesUseCase;
pub use refresh_policies::RefreshPoliciesUseCase;
pub use save_policy::{PolicyDraft, SavePolicyUseCase};
pub use toggle_policy::TogglePolicyUseCase;
