mod canonicalizer_tests;
