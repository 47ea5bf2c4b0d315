//! Answer options offered by the questionnaire.
//!
//! Options that gate other questions are closed enums so the rules that depend
//! on them can match exhaustively. The remaining option lists are exposed as
//! label constants; those answers are stored as free strings.

use serde::{Deserialize, Serialize};

labelled_options! {
    /// Q7: did pain medication help. Only asked when the pain score is above zero.
    PainRelief {
        Improved => "ดีขึ้น",
        NotImproved => "ไม่ดีขึ้น",
        NoMedication => "ไม่ได้ทานยาแก้ปวด",
    }
}

labelled_options! {
    /// Q16: antibiotic compliance.
    AntibioticCompliance {
        AsPrescribed => "ครบตามแพทย์สั่ง",
        ForgotOccasionally => "ลืมทานบางครั้ง",
        NeverTook => "ไม่ได้ทานเลย",
    }
}

labelled_options! {
    /// Q17: current compress treatment.
    CompressType {
        Cold => "ประคบเย็นอยู่",
        Warm => "ประคบอุ่นอยู่",
        Nothing => "ไม่ได้ประคบอะไรเลย",
    }
}

labelled_options! {
    /// Q18: intermaxillary fixation (jaw wiring) present.
    JawWiring {
        NotWired => "ไม่มีการมัดฟัน",
        Wired => "มีการมัดฟัน",
    }
}

impl AntibioticCompliance {
    /// Only "forgot occasionally" asks how many doses were missed.
    pub fn needs_missed_dose_count(&self) -> bool {
        matches!(self, AntibioticCompliance::ForgotOccasionally)
    }
}

impl JawWiring {
    pub fn is_wired(&self) -> bool {
        matches!(self, JawWiring::Wired)
    }
}

pub const GENDER_OPTIONS: &[&str] = &["ชาย", "หญิง"];

pub const PROCEDURE_OPTIONS: &[&str] = &[
    "ผ่าตัดขากรรไกรบน  (Lefort I)",
    "ผ่าตัดขากรรไกรล่าง (BSSRO-bilateral sagittal split osteotomy)",
    "ผ่าตัดถอนฟัน (Surgical removal of tooth)",
    "ถอนฟัน (Extraction)",
    "การตัดชิ้นเนื้อตรวจ (Biopsy)",
    "การตัดถุงน้ำออก (Cyst Enucleation)",
    "การกรีดและระบายหนอง (Incision and drainage)",
    "การรักษาการแหว่งของสันเหงือกโดยการนำกระดูกสะโพกมาปลูก (Repair alveolar cleft with Iliac crest bone graft)",
    "ผ่าตัดปุ่มกระดูก (Torectomy)",
    "การผ่าตัดเพื่อนำแผ่นโลหะและสกรูออก (Off plate and screws)",
];

pub const SWELLING_OPTIONS: &[&str] = &[
    "ปัจจุบันหายบวมแล้ว",
    "บวมลดลง",
    "บวมเท่าเดิม",
    "บวมมากขึ้น",
    "บวมมากขึ้นมากๆจนกระทบการใช้ชีวิตประจำวัน",
];

pub const BREATHING_OPTIONS: &[&str] = &["ไม่มี", "มี"];

pub const BLEEDING_OPTIONS: &[&str] = &[
    "ไม่มีเลือดซึมหรือไหลแล้ว",
    "เลือดซึม แต่หยุดได้เอง",
    "เลือดสีแดงสดไหลไม่หยุดปริมาณมาก",
];

pub const FEVER_OPTIONS: &[&str] = &["ไม่มีไข้", "มีไข้ (มากกว่า 38 องศาเซลเซียส)"];

pub const NUMBNESS_OPTIONS: &[&str] = &[
    "หายชาแล้วหลังทำหัตถการ",
    "ยังชาอยู่แต่ชาน้อยลงเรื่อยๆ",
    "ยังรู้สึกชาเท่ากับตอนหลังทำหัตถการทันที",
];

pub const PHLEBITIS_OPTIONS: &[&str] = &[
    "ไม่มีอาการปวด/บวม/แดง รอบรอยเข็ม",
    "มีอาการปวด/บวม/แดง รอบรอยเข็ม",
];

pub const SUTURE_OPTIONS: &[&str] = &[
    "ไหมแน่นดี / ไม่ได้สังเกต",
    "ไหมหลุดหายไปบางส่วน แต่ไม่มีเลือดไหล",
    "ไหมหลุดหายไปบางส่วน และมีอาการเลือดสีแดงสดไหล",
];

pub const OTHER_SYMPTOMS_OPTIONS: &[&str] = &[
    "ปวดหน่วงบริเวณหน้าแก้ม ร่วมกับมีน้ำมูกสีเหลือง/เขียว เหม็นลงคอ",
    "คลื่นไส้/อาเจียน",
    "ช้ำบริเวณแผลผ่าตัด",
    "ปวดหัว",
    "เวียนหัว",
    "น้ำหนักลด",
    "ท้องเสีย",
    "คัดแน่นจมูก",
    "มีน้ำมูก",
    "ไอ",
    "เจ็บคอ",
];

pub const IMF_WIRE_OPTIONS: &[&str] = &[
    "ลวด/ยางมัดฟันแน่นดี",
    "ลวด/ยางมัดฟันหลวม อ้าปากได้เล็กน้อย",
    "ยางมัดฟันขาดไปบางเส้น แต่ยังอ้าปากไม่ได้",
];

pub const WALKING_OPTIONS: &[&str] = &[
    "ไม่ได้ทำหัตถการ การรักษาการแหว่งของสันเหงือกโดยการนำกระดูกสะโพกมาปลูก",
    "เดินได้ปกติ",
    "เดินไม่ถนัด",
];

pub const BRUSHING_OPTIONS: &[&str] = &["แปรงฟันได้", "แปรงฟันไม่ได้"];

pub const RINSING_OPTIONS: &[&str] = &["บ้วนปากได้", "บ้วนปากไม่ได้"];

pub const FEEDING_METHOD_OPTIONS: &[&str] = &[
    "รับประทานอาหารผ่านกระบอกฉีดยา (syringe)",
    "รับประทานอาหารผ่านสายยาง (nasogastric tube)",
    "รับประทานอาหารได้ปกติ",
];

pub const FOOD_TYPE_OPTIONS: &[&str] = &[
    "อาหารเหลวใสไม่มีกาก เช่น น้ำซุปใส น้ำผลไม้กรอง นม",
    "อาหารปั่นเหลวมีกาก เช่น โจ๊กปั่นเหลว ไก่ปั่น",
];

pub const FOOD_AMOUNT_OPTIONS: &[&str] = &["รับประทานอาหารปริมาณปกติ", "รับประทานอาหารได้น้อยลง"];

pub const NG_TUBE_OPTIONS: &[&str] = &[
    "สายยางอยู่ในตำแหน่งเดิม,  เทปยึดจมูกกับสายแน่นดี ไม่เลื่อนหลุด",
    "สายยางเลื่อนตำแหน่ง, เทปยึดจมูกกับสายไม่แน่น, เลื่อนหลุด",
];
