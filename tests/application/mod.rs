mod answer_matcher_test;
