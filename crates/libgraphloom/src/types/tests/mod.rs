mod type_materializer_tests;
