use std::{env, process::Command, thread::sleep, time::Duration};

pub(crate) use child_process_terminator::ChildProcessTerminator;

mod child_process_terminator;

fn rosservice_listing_succeeds() -> bool {
    Command::new("rosservice")
        .arg("list")
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

/// Starts a roscore on a free port and points `ROS_MASTER_URI` at it.
pub(crate) fn run_roscore() -> ChildProcessTerminator {
    let port = portpicker::pick_unused_port().expect("no free port");
    println!("Running roscore on port: {port}");
    env::set_var("ROS_MASTER_URI", format!("http://localhost:{port}"));
    let roscore =
        ChildProcessTerminator::spawn(Command::new("roscore").arg("-p").arg(format!("{port}")));
    while !rosservice_listing_succeeds() {
        sleep(Duration::from_millis(100));
    }
    roscore
}
