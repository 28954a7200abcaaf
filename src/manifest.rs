/// One PNG in a macOS iconset: its pixel size and the file name `iconutil` expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManifestEntry {
    pub size: u32,
    pub file_name: &'static str,
}

impl ManifestEntry {
    const fn new(size: u32, file_name: &'static str) -> Self {
        Self { size, file_name }
    }
}

/// Every variant `iconutil -c icns` needs, from 16px up to 1024px.
pub const MACOS_ICONSET: &[ManifestEntry] = &[
    ManifestEntry::new(16, "icon_16x16.png"),
    ManifestEntry::new(32, "icon_16x16@2x.png"),
    ManifestEntry::new(32, "icon_32x32.png"),
    ManifestEntry::new(64, "icon_32x32@2x.png"),
    ManifestEntry::new(128, "icon_128x128.png"),
    ManifestEntry::new(256, "icon_128x128@2x.png"),
    ManifestEntry::new(256, "icon_256x256.png"),
    ManifestEntry::new(512, "icon_256x256@2x.png"),
    ManifestEntry::new(512, "icon_512x512.png"),
    ManifestEntry::new(1024, "icon_512x512@2x.png"),
];
