use super::Services;
use seer_application::use_cases::{
    CreateCustomRuleUseCase, DeleteCustomRulesUseCase, DeletePoliciesUseCase,
    EvaluatePoliciesUseCase, GetCustomRulesUseCase, GetDevicesUseCase, GetFirewallRulesUseCase,
    GetPoliciesUseCase, HandleBridgeMessageUseCase, LoadCpuHistoryUseCase,
    ManageBlacklistUseCase, RecordTelemetryUseCase, RefreshDevicesUseCase,
    RefreshPoliciesUseCase, RemoveDevicesUseCase, SavePolicyUseCase, SystemActionUseCase,
    ToggleCustomRuleUseCase, ToggleFirewallRuleUseCase, TogglePolicyUseCase,
    UnblockDeviceUseCase,
};
use seer_domain::Config;
use std::sync::Arc;
use std::time::Duration;

#[allow(dead_code)]
pub struct UseCases {
    pub get_policies: Arc<GetPoliciesUseCase>,
    pub refresh_policies: Arc<RefreshPoliciesUseCase>,
    pub evaluate_policies: Arc<EvaluatePoliciesUseCase>,
    pub toggle_policy: Arc<TogglePolicyUseCase>,
    pub delete_policies: Arc<DeletePoliciesUseCase>,
    pub save_policy: Arc<SavePolicyUseCase>,
    pub get_devices: Arc<GetDevicesUseCase>,
    pub refresh_devices: Arc<RefreshDevicesUseCase>,
    pub remove_devices: Arc<RemoveDevicesUseCase>,
    pub unblock_device: Arc<UnblockDeviceUseCase>,
    pub get_firewall_rules: Arc<GetFirewallRulesUseCase>,
    pub toggle_firewall_rule: Arc<ToggleFirewallRuleUseCase>,
    pub get_custom_rules: Arc<GetCustomRulesUseCase>,
    pub create_custom_rule: Arc<CreateCustomRuleUseCase>,
    pub delete_custom_rules: Arc<DeleteCustomRulesUseCase>,
    pub toggle_custom_rule: Arc<ToggleCustomRuleUseCase>,
    pub manage_blacklist: Arc<ManageBlacklistUseCase>,
    pub load_cpu_history: Arc<LoadCpuHistoryUseCase>,
    pub record_telemetry: Arc<RecordTelemetryUseCase>,
    pub system_action: Arc<SystemActionUseCase>,
    pub handle_message: Arc<HandleBridgeMessageUseCase>,
}

impl UseCases {
    pub fn new(services: &Services, config: &Config) -> Self {
        let bridge = &services.bridge;
        let api = &services.firewall_api;
        let notifier = &services.notifier;

        let record_telemetry = Arc::new(RecordTelemetryUseCase::new(
            services.telemetry.clone(),
            services.telemetry_cache.clone(),
            services.clock.clone(),
        ));

        Self {
            get_policies: Arc::new(GetPoliciesUseCase::new(services.policies.clone())),
            refresh_policies: Arc::new(RefreshPoliciesUseCase::new(bridge.clone())),
            evaluate_policies: Arc::new(EvaluatePoliciesUseCase::new(
                services.policies.clone(),
                bridge.clone(),
                services.clock.clone(),
            )),
            toggle_policy: Arc::new(TogglePolicyUseCase::new(
                services.policies.clone(),
                bridge.clone(),
                services.clock.clone(),
                notifier.clone(),
            )),
            delete_policies: Arc::new(DeletePoliciesUseCase::new(
                services.policies.clone(),
                bridge.clone(),
                notifier.clone(),
            )),
            save_policy: Arc::new(
                SavePolicyUseCase::new(services.policies.clone(), bridge.clone())
                    .with_resubmit_delay(Duration::from_millis(
                        config.scheduler.edit_resubmit_delay_ms,
                    )),
            ),
            get_devices: Arc::new(GetDevicesUseCase::new(services.devices.clone())),
            refresh_devices: Arc::new(RefreshDevicesUseCase::new(
                services.devices.clone(),
                bridge.clone(),
            )),
            remove_devices: Arc::new(RemoveDevicesUseCase::new(bridge.clone())),
            unblock_device: Arc::new(UnblockDeviceUseCase::new(
                services.devices.clone(),
                bridge.clone(),
            )),
            get_firewall_rules: Arc::new(GetFirewallRulesUseCase::new(api.clone())),
            toggle_firewall_rule: Arc::new(ToggleFirewallRuleUseCase::new(
                api.clone(),
                notifier.clone(),
            )),
            get_custom_rules: Arc::new(GetCustomRulesUseCase::new(api.clone())),
            create_custom_rule: Arc::new(CreateCustomRuleUseCase::new(
                api.clone(),
                notifier.clone(),
            )),
            delete_custom_rules: Arc::new(DeleteCustomRulesUseCase::new(
                api.clone(),
                notifier.clone(),
            )),
            toggle_custom_rule: Arc::new(ToggleCustomRuleUseCase::new(
                api.clone(),
                notifier.clone(),
            )),
            manage_blacklist: Arc::new(ManageBlacklistUseCase::new(
                services.firewall.clone(),
                bridge.clone(),
            )),
            load_cpu_history: Arc::new(LoadCpuHistoryUseCase::new(
                services.telemetry.clone(),
                services.telemetry_cache.clone(),
            )),
            record_telemetry: record_telemetry.clone(),
            system_action: Arc::new(SystemActionUseCase::new(bridge.clone())),
            handle_message: Arc::new(HandleBridgeMessageUseCase::new(
                services.policies.clone(),
                services.devices.clone(),
                services.firewall.clone(),
                record_telemetry,
                bridge.clone(),
                notifier.clone(),
            )),
        }
    }
}
