mod graph_loom_tests;
