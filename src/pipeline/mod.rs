pub mod stage1_load;
pub mod stage2_update;
pub mod stage3_classify;
pub mod stage4_report;
