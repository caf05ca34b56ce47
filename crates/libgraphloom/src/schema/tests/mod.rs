mod schema_assembler_tests;
