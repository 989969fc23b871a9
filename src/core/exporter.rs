use crate::domain::model::Antenna;
use crate::domain::ports::{RecordLayout, Storage};
use crate::domain::registry::AntennaRegistry;
use crate::utils::error::{GridError, Result};
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io::{self, BufWriter, Read, Write};

const NATIVE_PADDING: [u8; 3] = [0; 3];

impl RecordLayout {
    pub fn record_size(self) -> usize {
        match self {
            RecordLayout::Native => 12,
            RecordLayout::Packed => 9,
        }
    }
}

/// 記錄目前有 1 byte 頻率欄位，只接受 Latin-1 範圍的字元
fn frequency_byte(frequency: char) -> Result<u8> {
    u8::try_from(frequency).map_err(|_| GridError::UnencodableFrequency { frequency })
}

pub fn write_record<W: Write>(writer: &mut W, antenna: &Antenna, layout: RecordLayout) -> Result<()> {
    writer.write_u8(frequency_byte(antenna.frequency)?)?;
    if layout == RecordLayout::Native {
        writer.write_all(&NATIVE_PADDING)?;
    }
    writer.write_i32::<LittleEndian>(antenna.x)?;
    writer.write_i32::<LittleEndian>(antenna.y)?;
    Ok(())
}

/// 依走訪順序寫出每支天線，不含標頭、筆數或結尾。回傳寫入的筆數。
///
/// 中途失敗時已寫入的部分不會回復。
pub fn export<W: Write>(registry: &AntennaRegistry, writer: W, layout: RecordLayout) -> Result<usize> {
    let mut writer = BufWriter::new(writer);
    let mut written = 0;

    for antenna in registry.iter() {
        write_record(&mut writer, antenna, layout)?;
        written += 1;
    }

    writer.flush()?;
    Ok(written)
}

pub fn export_to_storage<S: Storage>(
    storage: &S,
    registry: &AntennaRegistry,
    path: &str,
    layout: RecordLayout,
) -> Result<usize> {
    let writer = storage.create_writer(path)?;
    let written = export(registry, writer, layout)?;
    tracing::debug!(
        "Wrote {} records ({} bytes) to '{}'",
        written,
        written * layout.record_size(),
        path
    );
    Ok(written)
}

/// 讀回 `export` 寫出的記錄，順序與寫入時相同
pub fn decode_records<R: Read>(mut reader: R, layout: RecordLayout) -> Result<Vec<Antenna>> {
    let mut antennas = Vec::new();
    let mut record = vec![0u8; layout.record_size()];

    loop {
        let filled = read_full(&mut reader, &mut record)?;
        if filled == 0 {
            break;
        }
        if filled < record.len() {
            return Err(GridError::CorruptRecord {
                message: format!(
                    "trailing {} bytes after {} complete records (record size {})",
                    filled,
                    antennas.len(),
                    record.len()
                ),
            });
        }
        antennas.push(parse_record(&record, layout)?);
    }

    Ok(antennas)
}

/// 讀回記錄並建立 registry，走訪順序與檔案中的記錄順序相同
pub fn decode_registry<R: Read>(reader: R, layout: RecordLayout) -> Result<AntennaRegistry> {
    let antennas = decode_records(reader, layout)?;
    // registry 走訪時最新插入者優先，所以反向插入
    Ok(antennas.into_iter().rev().collect())
}

fn parse_record(record: &[u8], layout: RecordLayout) -> Result<Antenna> {
    let mut rdr = io::Cursor::new(record);
    let frequency = char::from(rdr.read_u8()?);
    if layout == RecordLayout::Native {
        rdr.set_position(1 + NATIVE_PADDING.len() as u64);
    }
    let x = rdr.read_i32::<LittleEndian>()?;
    let y = rdr.read_i32::<LittleEndian>()?;
    Ok(Antenna::new(frequency, x, y))
}

/// 讀滿 `buf` 或直到 EOF，回傳實際讀到的位元組數
fn read_full<R: Read>(reader: &mut R, buf: &mut [u8]) -> Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(filled)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_registry() -> AntennaRegistry {
        let mut registry = AntennaRegistry::new();
        registry.insert('A', 2, 0).unwrap();
        registry.insert('a', 0, 2).unwrap();
        registry
    }

    #[test]
    fn test_native_layout_bytes() {
        let mut registry = AntennaRegistry::new();
        registry.insert('A', 1, 258).unwrap();

        let mut out = Vec::new();
        export(&registry, &mut out, RecordLayout::Native).unwrap();

        assert_eq!(out, vec![b'A', 0, 0, 0, 1, 0, 0, 0, 2, 1, 0, 0]);
    }

    #[test]
    fn test_packed_layout_bytes() {
        let mut registry = AntennaRegistry::new();
        registry.insert('0', 3, 4).unwrap();

        let mut out = Vec::new();
        export(&registry, &mut out, RecordLayout::Packed).unwrap();

        assert_eq!(out, vec![b'0', 3, 0, 0, 0, 4, 0, 0, 0]);
    }

    #[test]
    fn test_export_then_decode_preserves_order() {
        let registry = sample_registry();
        for layout in [RecordLayout::Native, RecordLayout::Packed] {
            let mut out = Vec::new();
            let written = export(&registry, &mut out, layout).unwrap();

            assert_eq!(written, 2);
            assert_eq!(out.len(), 2 * layout.record_size());

            let decoded = decode_records(out.as_slice(), layout).unwrap();
            let expected: Vec<Antenna> = registry.iter().copied().collect();
            assert_eq!(decoded, expected);
        }
    }

    #[test]
    fn test_empty_registry_writes_nothing() {
        let mut out = Vec::new();
        let written = export(&AntennaRegistry::new(), &mut out, RecordLayout::Native).unwrap();
        assert_eq!(written, 0);
        assert!(out.is_empty());
    }

    #[test]
    fn test_truncated_file_is_corrupt() {
        let mut out = Vec::new();
        export(&sample_registry(), &mut out, RecordLayout::Native).unwrap();
        out.truncate(out.len() - 5);

        let result = decode_records(out.as_slice(), RecordLayout::Native);
        assert!(matches!(result, Err(GridError::CorruptRecord { .. })));
    }

    #[test]
    fn test_decode_registry_keeps_file_order() {
        let registry = sample_registry();
        let mut out = Vec::new();
        export(&registry, &mut out, RecordLayout::Native).unwrap();

        let decoded = decode_registry(out.as_slice(), RecordLayout::Native).unwrap();

        let original: Vec<&Antenna> = registry.iter().collect();
        let restored: Vec<&Antenna> = decoded.iter().collect();
        assert_eq!(restored, original);
        assert_eq!(restored[0], &Antenna::new('a', 0, 2));
    }

    #[test]
    fn test_loaded_high_bytes_export_and_decode() {
        let bytes: &[u8] = &[0xE9, b'.', 0xCE, 0xA9, b'\n', b'A', 0xFF, b'.', b'.', b'\n'];
        let grid = crate::core::loader::load(bytes, "latin1.txt").unwrap();

        let mut out = Vec::new();
        let written = export(&grid.registry, &mut out, RecordLayout::Packed).unwrap();
        assert_eq!(written, grid.registry.len());

        let decoded = decode_records(out.as_slice(), RecordLayout::Packed).unwrap();
        let expected: Vec<Antenna> = grid.registry.iter().copied().collect();
        assert_eq!(decoded, expected);
        assert!(decoded.contains(&Antenna::new('\u{FF}', 1, 1)));
    }

    #[test]
    fn test_frequency_outside_latin1_is_rejected() {
        let mut registry = AntennaRegistry::new();
        registry.insert('Ω', 0, 0).unwrap();

        let result = export(&registry, Vec::new(), RecordLayout::Packed);
        assert!(matches!(
            result,
            Err(GridError::UnencodableFrequency { frequency: 'Ω' })
        ));
    }

    #[test]
    fn test_latin1_frequency_round_trips() {
        let mut registry = AntennaRegistry::new();
        registry.insert('é', 1, 1).unwrap();

        let mut out = Vec::new();
        export(&registry, &mut out, RecordLayout::Packed).unwrap();
        let decoded = decode_records(out.as_slice(), RecordLayout::Packed).unwrap();

        assert_eq!(decoded, vec![Antenna::new('é', 1, 1)]);
    }
}
