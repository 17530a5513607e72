use cores::error::RelayError;
use cores::lookup::JsonField;
use serde_json::Value;

/// The parts of a vCenter CloudEvent a PagerDuty alert is built from.
///
/// The envelope comes from the event router (`id, source, subject, data`),
/// `data` is the vCenter event itself.
#[derive(Debug, Clone, PartialEq)]
pub struct VmEvent {
    pub source: String,
    pub subject: String,
    pub summary: String,
    pub created_time: String,
    pub vm_name: String,
    pub host_name: String,
    pub details: EventDetails,
}

/// Optional event context forwarded as PagerDuty custom details.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EventDetails {
    pub user: Option<String>,
    pub vm: Option<Value>,
    pub host: Option<Value>,
    pub datacenter: Option<Value>,
    pub compute_resource: Option<Value>,
}

impl VmEvent {
    pub fn from_value(value: &Value) -> Result<Self, RelayError> {
        let root = JsonField::root(value, "Event");
        let data = root.field("data")?;
        let summary = data.field("FullFormattedMessage")?.string()?.to_owned();
        let created_time = data.field("CreatedTime")?.string()?.to_owned();
        let source = root.field("source")?.string()?.to_owned();
        let vm_name = data.field("Vm")?.field("Name")?.string()?.to_owned();
        let host_name = data.field("Host")?.field("Name")?.string()?.to_owned();
        let subject = root.field("subject")?.string()?.to_owned();

        let optional = |key: &str| {
            data.value()
                .get(key)
                .filter(|v| !v.is_null())
                .cloned()
        };
        let details = EventDetails {
            user: data.value().get("UserName").and_then(Value::as_str).map(str::to_owned),
            vm: optional("Vm"),
            host: optional("Host"),
            datacenter: optional("Datacenter"),
            compute_resource: optional("ComputeResource"),
        };
        Ok(Self {
            source,
            subject,
            summary,
            created_time,
            vm_name,
            host_name,
            details,
        })
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    // Standard : VmPoweredOnEvent
    pub const VM_POWERED_ON: &str = r#"{"id":"453120cd-3d19-4c43-aadc-df0cdbce3887","source":"https://vcsa.pdotk.local/sdk","specversion":"1.0","type":"com.vmware.event.router/event","subject":"VmPoweredOnEvent","time":"2020-04-13T23:46:10.402531287Z","data":{"Key":7441,"ChainId":7438,"CreatedTime":"2020-04-13T23:46:09.387283Z","UserName":"Administrator","Datacenter":{"Name":"PKLAB","Datacenter":{"Type":"Datacenter","Value":"datacenter-3"}},"ComputeResource":{"Name":"esxi01.pdotk.local","ComputeResource":{"Type":"ComputeResource","Value":"domain-s29"}},"Host":{"Name":"esxi01.pdotk.local","Host":{"Type":"HostSystem","Value":"host-31"}},"Vm":{"Name":"Test VM","Vm":{"Type":"VirtualMachine","Value":"vm-33"}},"Ds":null,"Net":null,"Dvs":null,"FullFormattedMessage":"Test VM on esxi01.pdotk.local in PKLAB has powered on","ChangeTag":"","Template":false},"datacontenttype":"application/json"}"#;

    // Standard : UserLogoutSessionEvent, carries no VM
    pub const USER_LOGOUT: &str = r#"{"id":"17e1027a-c865-4354-9c21-e8da3df4bff9","source":"https://vcsa.pdotk.local/sdk","specversion":"1.0","type":"com.vmware.event.router/event","subject":"UserLogoutSessionEvent","time":"2020-04-14T00:28:36.455112549Z","data":{"Key":7775,"ChainId":7775,"CreatedTime":"2020-04-14T00:28:35.221698Z","UserName":"machine-b8eb9a7f","Datacenter":null,"ComputeResource":null,"Host":null,"Vm":null,"Ds":null,"Net":null,"Dvs":null,"FullFormattedMessage":"User machine-b8ebe7eb9a7f@127.0.0.1 logged out","ChangeTag":"","IpAddress":"127.0.0.1","CallCount":34,"SessionId":"52edf160927","LoginTime":"2020-04-14T00:28:35.071817Z"},"datacontenttype":"application/json"}"#;
}
