#[derive(Debug, Clone, Copy)]
pub enum InputRecord {
    Ddr,
    DataRecord,
    Literal(&'static [u8]),
}

impl InputRecord {
    pub const fn data(&self) -> &'static [u8] {
        use InputRecord::*;
        match self {
            Ddr => b"002413LE1 0900066 ! 3404",
            // Leader, one DSID directory entry, then the DSID field
            DataRecord => b"000462L   0600036   3404DSID0100000\x1eNOA\x1fCHART\x1e",
            Literal(data) => data,
        }
    }
}
