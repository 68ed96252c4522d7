/// Placeholder IP used when none is given on switch
pub const DEFAULT_IP: &str = "X.X.X.X";

/// Placeholder OS used when none is given on switch
pub const DEFAULT_OS: &str = "Unknown";

/// Section names of the template, in document order
pub const TEMPLATE_SECTIONS: [&str; 6] =
    ["Information", "Enumeration", "Exploitation", "Privilege Escalation", "Loot", "DUMP"];

/// Render the note skeleton for a new target
///
/// Values are placed on a single line each, so the rendered note always has exactly
/// the [`TEMPLATE_SECTIONS`] headers whatever the inputs contain. Each value is
/// substituted once; braces inside a value are written as given.
pub fn render_template(name: &str, ip: Option<&str>, os: Option<&str>) -> String {
    let name = single_line(name);
    let ip = single_line(ip.unwrap_or(DEFAULT_IP));
    let os = single_line(os.unwrap_or(DEFAULT_OS));

    format!(
        "# {name}

## Information
- **IP:** {ip}
- **OS:** {os}
- **Difficulty:** Unknown

## Enumeration
> Initial scans and service discovery.

## Exploitation
> Foothold and reverse shells.

## Privilege Escalation
> Path to root/system.

## Loot
> Flags and credentials.

## DUMP
> Raw output dump.
"
    )
}

fn single_line(value: &str) -> String {
    value.replace("\r\n", " ").replace(['\n', '\r'], " ")
}
