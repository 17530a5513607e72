/// An automation function reachable through the gateway.
#[derive(Debug, PartialEq, Eq)]
pub struct CommandRoute {
    pub pattern: &'static str,
    pub function: &'static str,
    pub label: &'static str,
}

/// Evaluated top to bottom; the first pattern contained in the command text
/// wins, so "clonetemplate" must stay ahead of "clone".
pub const COMMAND_ROUTES: [CommandRoute; 10] = [
    CommandRoute { pattern: "echo", function: "powercli-echo", label: "Echo" },
    CommandRoute { pattern: "spawn", function: "powercli-createvm", label: "Create VM" },
    CommandRoute { pattern: "clonetemplate", function: "powercli-vmclonetemplate", label: "Clone Template" },
    CommandRoute { pattern: "clone", function: "powercli-clonevm", label: "Clone VM" },
    CommandRoute { pattern: "poweron", function: "powercli-poweronvm", label: "PowerOn VM" },
    CommandRoute { pattern: "poweroff", function: "powercli-poweroffvm", label: "PowerOff VM" },
    CommandRoute { pattern: "reboot", function: "powercli-rebootvm", label: "Reboot VM" },
    CommandRoute { pattern: "nuke", function: "powercli-deletevm", label: "Delete VM" },
    CommandRoute { pattern: "transform", function: "powercli-setvm", label: "Transform VM" },
    CommandRoute { pattern: "invoke", function: "powercli-danger", label: "Invoke" },
];

pub fn route_command(text: &str) -> Option<&'static CommandRoute> {
    COMMAND_ROUTES.iter().find(|route| text.contains(route.pattern))
}

impl CommandRoute {
    pub fn url(&self, gateway_url: &str) -> String {
        [gateway_url.trim_end_matches('/'), "async-function", self.function].join("/")
    }

    pub fn failure_context(&self) -> String {
        format!("{} Function Failed", self.label)
    }
}
