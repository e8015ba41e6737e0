use crate::catalog::Catalog;
use crate::types::DeviceRecord;

const HEADER: &str = "\
# Devices Supported by LinuxCNC-Ethercat

*This is a work in progress, listing all of the devices that LinuxCNC-Ethercat
has code to support today.  Not all of these are well-tested.*

Description | Name in Source Code | EtherCAT VID:PID | Device Type | Channels | Notes
----------- | ------------------- | ---------------- | ----------- | -------: | ------
";

pub fn render_markdown(catalog: &Catalog) -> String {
    render(&catalog.documented, catalog.placeholders)
}

/// Render the full device table document.
pub fn render(documented: &[DeviceRecord], placeholders: usize) -> String {
    let mut out = String::from(HEADER);
    for rec in documented {
        out.push_str(&format!(
            "{} | {} | {} | {} | {} | {}\n",
            description_cell(rec),
            rec.device,
            vid_pid_cell(rec),
            rec.device_type,
            channels_cell(rec.channels),
            rec.notes
        ));
    }

    out.push('\n');
    if placeholders > 0 {
        out.push_str(&format!(
            "There are an additional {placeholders} devices supported that do not have enough\n\
             documentation to display here.  Please look at the `documentation/devices/` files\n\
             and update them if you're able.\n"
        ));
    }
    out
}

/// Description, linked when the record carries an http(s) documentation URL.
pub fn description_cell(rec: &DeviceRecord) -> String {
    if rec.has_documentation_link() {
        format!("[{}]({})", rec.description, rec.documentation_url)
    } else {
        rec.description.clone()
    }
}

pub fn vid_pid_cell(rec: &DeviceRecord) -> String {
    format!("{}:{}", rec.vendor_id, rec.product_id)
}

/// Zero channels means unspecified and renders blank.
pub fn channels_cell(channels: i64) -> String {
    if channels == 0 {
        String::new()
    } else {
        channels.to_string()
    }
}
