use crate::domain::model::{GridDimensions, LoadedGrid, EMPTY_MARKER};
use crate::domain::ports::Storage;
use crate::domain::registry::AntennaRegistry;
use crate::utils::error::{GridError, Result};
use std::io::BufRead;

/// 逐行讀取矩陣位元組，每個非 `.` 位元組建立一支天線。
///
/// 每個位元組以 Latin-1 對應成 `char`，與二進位記錄的 1 byte 頻率欄位一致，
/// 載入的天線一定能以目前的記錄格式匯出。
/// `rows` 為讀到的行數 (含空行)，`cols` 為單行最多位元組數，不含 `\n` 或 `\r\n`。
/// `path` 只用於錯誤訊息。
pub fn load<R: BufRead>(mut reader: R, path: &str) -> Result<LoadedGrid> {
    let mut registry = AntennaRegistry::new();
    let mut dimensions = GridDimensions::default();
    let mut line = Vec::new();

    loop {
        line.clear();
        let read = reader
            .read_until(b'\n', &mut line)
            .map_err(|source| GridError::SourceUnavailable {
                path: path.to_string(),
                source,
            })?;
        if read == 0 {
            break;
        }
        let row = coordinate("row", dimensions.rows)?;

        let content = strip_line_terminator(&line);
        for (x, &byte) in content.iter().enumerate() {
            let frequency = char::from(byte);
            if frequency != EMPTY_MARKER {
                registry.insert(frequency, coordinate("column", x)?, row)?;
            }
        }

        dimensions.cols = dimensions.cols.max(content.len());
        dimensions.rows += 1;
    }

    tracing::debug!(
        "Loaded {} antennas from '{}' ({} rows x {} cols)",
        registry.len(),
        path,
        dimensions.rows,
        dimensions.cols
    );

    Ok(LoadedGrid {
        registry,
        dimensions,
    })
}

pub fn load_from_storage<S: Storage>(storage: &S, path: &str) -> Result<LoadedGrid> {
    let reader = storage.open_reader(path)?;
    load(reader, path)
}

fn strip_line_terminator(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

fn coordinate(axis: &'static str, index: usize) -> Result<i32> {
    i32::try_from(index).map_err(|_| GridError::GridTooLarge { axis, index })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Antenna;
    use std::io::{self, Cursor, Read};

    fn load_str(text: &str) -> LoadedGrid {
        load(Cursor::new(text.as_bytes()), "test.txt").unwrap()
    }

    fn triples(grid: &LoadedGrid) -> Vec<(char, i32, i32)> {
        grid.registry.iter().map(|a| (a.frequency, a.x, a.y)).collect()
    }

    #[test]
    fn test_load_mixed_frequencies() {
        let grid = load_str("..A\n...\na..\n");

        assert_eq!(grid.dimensions, GridDimensions::new(3, 3));
        // 新天線插在頭，因此與掃描順序相反
        assert_eq!(triples(&grid), vec![('a', 0, 2), ('A', 2, 0)]);
    }

    #[test]
    fn test_load_counts_blank_lines_and_longest_line() {
        let grid = load_str("A\n\n..0..\n");

        assert_eq!(grid.dimensions.rows, 3);
        assert_eq!(grid.dimensions.cols, 5);
        assert_eq!(triples(&grid), vec![('0', 2, 2), ('A', 0, 0)]);
    }

    #[test]
    fn test_load_without_trailing_newline_and_crlf() {
        let grid = load_str("A.\r\n.B");

        assert_eq!(grid.dimensions, GridDimensions::new(2, 2));
        assert_eq!(triples(&grid), vec![('B', 1, 1), ('A', 0, 0)]);
    }

    #[test]
    fn test_load_empty_input() {
        let grid = load_str("");
        assert_eq!(grid.dimensions, GridDimensions::new(0, 0));
        assert!(grid.registry.is_empty());
    }

    #[test]
    fn test_every_non_empty_character_becomes_an_antenna() {
        let text = "a.#\n.Z.\n9..\n";
        let grid = load_str(text);

        let mut expected = Vec::new();
        for (y, line) in text.lines().enumerate() {
            for (x, c) in line.chars().enumerate() {
                if c != EMPTY_MARKER {
                    expected.push(Antenna::new(c, x as i32, y as i32));
                }
            }
        }
        let mut actual: Vec<Antenna> = grid.registry.iter().copied().collect();
        actual.reverse();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_non_utf8_byte_loads_as_latin1_frequency() {
        let bytes: &[u8] = &[b'A', b'.', 0xE9, b'\n', b'.', 0xE9, b'.', b'\n'];
        let grid = load(Cursor::new(bytes), "latin1.txt").unwrap();

        assert_eq!(grid.dimensions, GridDimensions::new(2, 3));
        assert_eq!(triples(&grid), vec![('é', 1, 1), ('é', 2, 0), ('A', 0, 0)]);
    }

    #[test]
    fn test_multibyte_utf8_is_scanned_per_byte() {
        // 'Ω' 在 UTF-8 中佔 0xCE 0xA9 兩個位元組
        let grid = load_str("Ω.A\n");

        assert_eq!(grid.dimensions, GridDimensions::new(1, 4));
        assert_eq!(
            triples(&grid),
            vec![('A', 3, 0), ('\u{A9}', 1, 0), ('\u{CE}', 0, 0)]
        );
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk failure"))
        }
    }

    #[test]
    fn test_read_failure_is_source_unavailable() {
        let result = load(io::BufReader::new(FailingReader), "broken.txt");
        assert!(matches!(
            result,
            Err(GridError::SourceUnavailable { ref path, .. }) if path == "broken.txt"
        ));
    }
}
