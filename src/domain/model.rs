use crate::domain::registry::AntennaRegistry;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// 輸入與初始矩陣中代表「無天線」的字元
pub const EMPTY_MARKER: char = '.';

/// 矩陣中標示干擾點的字元
pub const INTERFERENCE_MARKER: char = '#';

/// 以單一字元頻率與格點座標描述的天線。建立後不可變更。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Antenna {
    pub frequency: char,
    /// 欄 (column)
    pub x: i32,
    /// 列 (row)
    pub y: i32,
}

impl Antenna {
    pub fn new(frequency: char, x: i32, y: i32) -> Self {
        Self { frequency, x, y }
    }

    pub fn matches(&self, frequency: char, x: i32, y: i32) -> bool {
        self.frequency == frequency && self.x == x && self.y == y
    }
}

impl fmt::Display for Antenna {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Frequência: {}, Coordenadas: ({}, {})",
            self.frequency, self.x, self.y
        )
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridDimensions {
    pub rows: usize,
    pub cols: usize,
}

impl GridDimensions {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// 若 (x, y) 落在 `[0,cols) x [0,rows)` 內則回傳對應格點
    pub fn point_at(&self, x: i64, y: i64) -> Option<Point> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        (x < self.cols && y < self.rows).then_some(Point { x, y })
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }
}

/// 干擾 (antinode) 座標，只帶位置，不帶頻率
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// 由矩陣載入得到的天線集合與尺寸
#[derive(Debug, Clone, Default)]
pub struct LoadedGrid {
    pub registry: AntennaRegistry,
    pub dimensions: GridDimensions,
}

/// 以 `row * cols + col` 索引的扁平字元矩陣
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedGrid {
    dimensions: GridDimensions,
    cells: Vec<char>,
}

impl RenderedGrid {
    pub fn filled(dimensions: GridDimensions, fill: char) -> Self {
        Self {
            dimensions,
            cells: vec![fill; dimensions.cell_count()],
        }
    }

    pub fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    pub fn cell(&self, x: usize, y: usize) -> Option<char> {
        self.index(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: usize, y: usize, value: char) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.cells[i] = value;
                true
            }
            None => false,
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[char]> + '_ {
        let cols = self.dimensions.cols;
        (0..self.dimensions.rows).map(move |row| &self.cells[row * cols..(row + 1) * cols])
    }

    pub fn count(&self, value: char) -> usize {
        self.cells.iter().filter(|&&c| c == value).count()
    }

    fn index(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.dimensions.cols && y < self.dimensions.rows)
            .then(|| y * self.dimensions.cols + x)
    }
}

/// 每列一行，格子之間以單一空白分隔
impl fmt::Display for RenderedGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line = row
                .iter()
                .map(char::to_string)
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// transform 階段的結果：干擾點集合與繪製好的矩陣
#[derive(Debug, Clone)]
pub struct GridReport {
    pub registry: AntennaRegistry,
    pub dimensions: GridDimensions,
    pub interference: BTreeSet<Point>,
    pub grid: RenderedGrid,
}
