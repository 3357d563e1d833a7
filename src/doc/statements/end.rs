/*!
# `END`

## Purpose
Stop running the program and return to the command prompt.

## Remarks
Variables are left intact for inspection.
`END` at the end of a program is optional.

## Example
```text
10 PRINT 1
20 END
30 PRINT 2
RUN
1
```

*/
