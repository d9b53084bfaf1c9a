pub mod in_memory_code_store;
