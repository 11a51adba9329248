//! Minimal JPEG fixtures carrying an EXIF DateTimeOriginal.

const TAG_EXIF_IFD_POINTER: u16 = 0x8769;
const TAG_DATETIME_ORIGINAL: u16 = 0x9003;
const TAG_SUBSEC_TIME_ORIGINAL: u16 = 0x9291;
const TYPE_ASCII: u16 = 2;
const TYPE_LONG: u16 = 4;

fn ascii(s: &str) -> Vec<u8> {
    let mut v = s.as_bytes().to_vec();
    v.push(0);
    v
}

/// Little-endian TIFF: IFD0 -> Exif IFD -> DateTimeOriginal [+ SubSecTimeOriginal].
pub(crate) fn tiff_with_original(datetime: &str, subsec: Option<&str>) -> Vec<u8> {
    let mut entries = vec![(TAG_DATETIME_ORIGINAL, ascii(datetime))];
    if let Some(s) = subsec {
        entries.push((TAG_SUBSEC_TIME_ORIGINAL, ascii(s)));
    }

    let exif_ifd: u32 = 8 + 2 + 12 + 4;
    let data_start = exif_ifd + 2 + 12 * entries.len() as u32 + 4;

    let mut out = b"II*\0".to_vec();
    out.extend(8u32.to_le_bytes());

    out.extend(1u16.to_le_bytes());
    out.extend(TAG_EXIF_IFD_POINTER.to_le_bytes());
    out.extend(TYPE_LONG.to_le_bytes());
    out.extend(1u32.to_le_bytes());
    out.extend(exif_ifd.to_le_bytes());
    out.extend(0u32.to_le_bytes());

    out.extend((entries.len() as u16).to_le_bytes());
    let mut data = Vec::new();
    for (tag, bytes) in &entries {
        out.extend(tag.to_le_bytes());
        out.extend(TYPE_ASCII.to_le_bytes());
        out.extend((bytes.len() as u32).to_le_bytes());
        if bytes.len() <= 4 {
            let mut inline = bytes.clone();
            inline.resize(4, 0);
            out.extend(inline);
        } else {
            out.extend((data_start + data.len() as u32).to_le_bytes());
            data.extend_from_slice(bytes);
        }
    }
    out.extend(0u32.to_le_bytes());
    out.extend(data);
    out
}

/// SOI + APP1("Exif\0\0" + TIFF) + EOI.
pub(crate) fn jpeg_with_original(datetime: &str, subsec: Option<&str>) -> Vec<u8> {
    let tiff = tiff_with_original(datetime, subsec);
    let seg_len = (2 + 6 + tiff.len()) as u16;
    let mut out = vec![0xFF, 0xD8, 0xFF, 0xE1];
    out.extend(seg_len.to_be_bytes());
    out.extend_from_slice(b"Exif\0\0");
    out.extend(tiff);
    out.extend([0xFF, 0xD9]);
    out
}
