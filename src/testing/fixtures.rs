use crate::adb::AdbRunner;
use crate::core::types::DeviceId;
use crate::testing::mocks::MockAdb;

pub const TEST_SERIAL: &str = "emulator-5554";

/// A device laid out like a typical phone's shared storage
pub fn phone() -> MockAdb {
    MockAdb::new()
        .with_dir("/sdcard/DCIM/Camera")
        .with_dir("/sdcard/Download")
        .with_dir("/sdcard/Music")
        .with_dir("/sdcard/.thumbnails")
        .with_file("/sdcard/Download/file10.txt", b"ten")
        .with_file("/sdcard/Download/file2.txt", b"two")
        .with_file("/sdcard/Download/File1.txt", b"one")
        .with_file("/sdcard/Download/my notes.txt", b"notes")
        .with_file("/sdcard/.nomedia", b"")
        .with_file("/sdcard/DCIM/Camera/IMG_0001.jpg", &[0xFF, 0xD8, 0xFF])
        .with_executable("/system/bin/toybox")
        .with_broken_symlink("/sdcard/stale")
        .with_denied("/data")
}

/// Runner bound to [`TEST_SERIAL`]
pub fn runner(device: MockAdb) -> AdbRunner<MockAdb> {
    AdbRunner::new(device, Some(DeviceId::new(TEST_SERIAL)))
}

/// Runner that lets adb pick the device
pub fn runner_without_serial(device: MockAdb) -> AdbRunner<MockAdb> {
    AdbRunner::new(device, None)
}

/// Convert a slice of literals into an owned argument list
pub fn args(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}
