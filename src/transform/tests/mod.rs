mod transform_tests;
