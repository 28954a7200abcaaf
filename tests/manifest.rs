use iconsmith::manifest::MACOS_ICONSET;

#[test]
fn has_every_iconutil_variant_in_order() {
    let names: Vec<_> = MACOS_ICONSET.iter().map(|e| e.file_name).collect();
    assert_eq!(
        names,
        vec![
            "icon_16x16.png",
            "icon_16x16@2x.png",
            "icon_32x32.png",
            "icon_32x32@2x.png",
            "icon_128x128.png",
            "icon_128x128@2x.png",
            "icon_256x256.png",
            "icon_256x256@2x.png",
            "icon_512x512.png",
            "icon_512x512@2x.png",
        ]
    );
}

#[test]
fn sizes_span_16_to_1024() {
    let sizes: Vec<_> = MACOS_ICONSET.iter().map(|e| e.size).collect();
    assert_eq!(sizes, vec![16, 32, 32, 64, 128, 256, 256, 512, 512, 1024]);
}

#[test]
fn retina_variants_double_their_point_size() {
    for pair in MACOS_ICONSET.chunks(2) {
        let (base, retina) = (&pair[0], &pair[1]);
        assert!(!base.file_name.contains("@2x"), "{}", base.file_name);
        assert!(retina.file_name.contains("@2x"), "{}", retina.file_name);
        assert_eq!(retina.size, base.size * 2);
        assert_eq!(retina.file_name, base.file_name.replace(".png", "@2x.png"));
    }
}

#[test]
fn base_names_match_their_size() {
    for entry in MACOS_ICONSET.iter().filter(|e| !e.file_name.contains("@2x")) {
        assert_eq!(entry.file_name, format!("icon_{0}x{0}.png", entry.size));
    }
}
