pub mod master_table;
