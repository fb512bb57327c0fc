//! Section-heading trigger catalog.
//!
//! The catalog is a totally ordered sequence: precedence is declaration
//! order and the earliest matching rule wins, so more specific triggers must
//! stay above the shorter keywords they contain. To add a category, append a
//! rule; reordering existing rules changes classification outcomes.

/// Category assigned to entries no recognized heading governs; flagged for
/// manual review downstream.
pub const REVIEW_CATEGORY: &str = "NEW CHECK";

const LEAVE: &str =
    "CUTI TAHUN/CPMH/C.SAKIT/C.TAMAT PERKHIDMATAN/C.EHSAN/C.SAMBUNG SAIN/ CUTI PERALIHAN";
const DUTY_OFFICER: &str = "PEG BERTUGAS/SJN/KERANI/KOS/KOK/DUTY KERANI";
const PLACEMENT_IN_UNIT: &str = "PENEMPATAN DALAM UNIT";
const OFFICE_DUTY: &str = "BERTUGAS PEJABAT / TUGAS LUAR BN";
const ADMIN_REST: &str = "PENTADBIRAN / REHAT SELEPAS BERTUGAS";
const LATE_ARRIVAL: &str = "KEBENARAN AKHIR DATANG";
const PERMITTED_OUT: &str = "KEBENARAN KELUAR";
const ON_PARADE: &str = "HADIR BERBARIS";
const PATROL: &str = "RONDAAN/RECCE";
const OPS_ROOMS: &str = "OPS ROOMS";
const NON_MUSLIM: &str = "NON - MUSLIM";

#[derive(Debug, Clone, Copy)]
pub struct HeaderRule {
    pub trigger: &'static str,
    pub category: &'static str,
}

const fn rule(trigger: &'static str, category: &'static str) -> HeaderRule {
    HeaderRule { trigger, category }
}

pub const HEADER_RULES: &[HeaderRule] = &[
    // placements: named locations before the general keyword
    rule("DEPO LOG", "PENEMPATAN LUAR UNIT"),
    rule("ATT PGK EKO COY", PLACEMENT_IN_UNIT),
    rule("E KOMP", PLACEMENT_IN_UNIT),
    rule("PENEMPATAN", PLACEMENT_IN_UNIT),
    rule("TUGAS TETAP LLP", PLACEMENT_IN_UNIT),
    rule("PENTADBIRAN", ADMIN_REST),
    // duty rosters
    rule("JL KERANI", "JURULATIH KERANI"),
    rule("BERTUGAS PEJABAT", OFFICE_DUTY),
    rule("BERTUGAS STOR", OFFICE_DUTY),
    rule("BERTUGAS ARMSKOTE", OFFICE_DUTY),
    rule("BERTUGAS", OFFICE_DUTY),
    rule("STORE", OFFICE_DUTY),
    rule("STOR", OFFICE_DUTY),
    rule("ARMSKOTE", OFFICE_DUTY),
    rule("PEJABAT", OFFICE_DUTY),
    rule("GUARD", OFFICE_DUTY),
    rule("KOS", DUTY_OFFICER),
    rule("KOK", DUTY_OFFICER),
    rule("DB", DUTY_OFFICER),
    rule("DO", DUTY_OFFICER),
    rule("DVR/ RO CO", "DRIVER CO & OPSO"),
    // ops and activities
    rule("RONDAAN HUTAN", PATROL),
    rule("RONDAAN", PATROL),
    rule("PROJEK", "PROJEK"),
    rule("P2B", "P2B"),
    rule("REBRO", "REBRO"),
    rule("OPS ROOM", OPS_ROOMS),
    rule("OPS", OPS_ROOMS),
    // attendance
    rule("HADIR BARIS", ON_PARADE),
    rule("HADIR BERBARIS", ON_PARADE),
    rule("BARIS", ON_PARADE),
    rule("HADIR", ON_PARADE),
    // leave and permissions, variant spellings included
    rule("KURSUS PERALIHAN", LEAVE),
    rule("KEBENARAN AKHIR DATANG", LATE_ARRIVAL),
    rule("KEBENARAN AKHER DATANG", LATE_ARRIVAL),
    rule("KAD", LATE_ARRIVAL),
    rule("DATANG", LATE_ARRIVAL),
    rule("KEBENARAN KELUAR", PERMITTED_OUT),
    rule("KEBENARN KELUAR", PERMITTED_OUT),
    rule("KELUAR", PERMITTED_OUT),
    rule("CPHM", LEAVE),
    rule("CUTI EHSAN", LEAVE),
    rule("CUTI TAHUN", LEAVE),
    rule("CUTI", LEAVE),
    // admin and the rest
    rule("REHAT", ADMIN_REST),
    rule("KURSUS", "KURSUS DLM NEGERI"),
    rule("ATT", "ATTCH A/B/C/CHQ/MARKAS BN/ATTCH SBT"),
    rule("MUSLIM", NON_MUSLIM),
    rule("NON", NON_MUSLIM),
    rule("DENTAL", "DENTAL"),
];
